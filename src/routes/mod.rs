use actix_web::web;

pub mod health;
pub mod routine;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/users")
            .service(user::create::create)
            .service(user::follow::follow)
            .service(user::follow::unfollow),
    );
    cfg.service(
        web::scope("/routines")
            .service(routine::list::list)
            .service(routine::list::following)
            .service(routine::scrap::scrapped)
            .service(routine::create::create)
            .service(routine::like::like)
            .service(routine::like::unlike)
            .service(routine::scrap::scrap)
            .service(routine::scrap::unscrap)
            .service(routine::detail::detail)
            .service(routine::delete::remove),
    );
}
