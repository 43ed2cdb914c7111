use actix_web::web;

pub mod health;
pub mod movie;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            .service(user::create::create)
            .service(user::delete::delete)
            .service(movie::list::list)
            .service(movie::create::create)
            .service(movie::delete::delete),
    );
    cfg.service(
        web::scope("/movies")
            .service(movie::get::get_movie)
            .service(movie::update::update),
    );
}
