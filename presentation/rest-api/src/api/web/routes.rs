use std::sync::Arc;

use poem::error::InternalServerError;
use poem::handler;
use poem::web::{Data, Form, Html, Redirect};
use serde::Deserialize;

use business::domain::user::model::User;
use business::domain::user::use_cases::create::{CreateUserParams, CreateUserUseCase};
use business::domain::user::use_cases::get_all::GetAllUsersUseCase;

/// Handlers for the server-rendered user form pages.
pub struct WebContext {
    pub get_all_users: Arc<dyn GetAllUsersUseCase>,
    pub create_user: Arc<dyn CreateUserUseCase>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitUserForm {
    pub name: String,
    pub email: String,
}

/// GET / — list all users plus a blank submission form.
#[handler]
pub async fn home(ctx: Data<&Arc<WebContext>>) -> poem::Result<Html<String>> {
    let users = ctx.get_all_users.execute().await.map_err(InternalServerError)?;
    Ok(Html(render_index(&users)))
}

/// POST /submit — persist the submitted user, then redirect to the list.
#[handler]
pub async fn submit_form(
    ctx: Data<&Arc<WebContext>>,
    Form(form): Form<SubmitUserForm>,
) -> poem::Result<Redirect> {
    ctx.create_user
        .execute(CreateUserParams {
            name: form.name,
            email: form.email,
        })
        .await
        .map_err(InternalServerError)?;

    Ok(Redirect::see_other("/"))
}

/// GET /health — liveness probe, answers regardless of system state.
#[handler]
pub async fn health() -> &'static str {
    "OK"
}

fn render_index(users: &[User]) -> String {
    let mut rows = String::new();
    for user in users {
        rows.push_str(&format!(
            "<li>{} &lt;{}&gt; <small>{}</small></li>\n",
            escape_html(&user.name),
            escape_html(&user.email),
            user.created_at.to_rfc3339(),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Users</title></head>
<body>
<h1>Users</h1>
<ul>
{rows}</ul>
<form action="/submit" method="post">
  <input type="text" name="name" placeholder="Name" required>
  <input type="email" name="email" placeholder="Email" required>
  <button type="submit">Add user</button>
</form>
</body>
</html>
"#
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
