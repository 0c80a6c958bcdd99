use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::create::CreateUserUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;

use crate::api::web::routes::WebContext;

pub struct DependencyContainer {
    pub product_api: crate::api::product::routes::ProductApi,
    pub user_api: crate::api::user::routes::UserApi,
    pub web_context: Arc<WebContext>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // User use cases
        let create_user_use_case = Arc::new(CreateUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_users_use_case = Arc::new(GetAllUsersUseCaseImpl {
            repository: user_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        // The JSON API and the web form share the same user use cases.
        let user_api = crate::api::user::routes::UserApi::new(
            create_user_use_case.clone(),
            get_all_users_use_case.clone(),
        );

        let web_context = Arc::new(WebContext {
            get_all_users: get_all_users_use_case,
            create_user: create_user_use_case,
        });

        Self {
            product_api,
            user_api,
            web_context,
        }
    }
}
