/// HTTP endpoints for club-service
///
/// Handlers stay thin: parse input, call the service, translate the result.
/// Reads answer JSON for the presentation layer; successful mutations answer
/// `303 See Other` pointing at the canonical location of the affected
/// resource, the way the site has always redirected after a form post.
pub mod album;
pub mod comments;
pub mod forms;
pub mod members;
pub mod news;
pub mod posts;
pub mod schedule;

use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::middleware::SessionAuth;

/// Redirect to the canonical location of the affected resource.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Optional form values: empty submissions count as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Route table. Reads are public; everything that writes sits behind the
/// session-gateway middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/community")
            .route("/board/{category}", web::get().to(posts::list_board))
            .route("/post/{id}", web::get().to(posts::get_post))
            .service(
                web::resource("/write/{category}")
                    .route(web::post().to(posts::create_post))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/edit/{id}")
                    .route(web::post().to(posts::update_post))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/post/delete/{id}")
                    .route(web::post().to(posts::delete_post))
                    .wrap(SessionAuth),
            ),
    )
    .service(
        web::scope("/schedule")
            .route("", web::get().to(schedule::list_events))
            .service(
                web::resource("/add")
                    .route(web::post().to(schedule::add_event))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/edit/{id}")
                    .route(web::post().to(schedule::edit_event))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/delete/{id}")
                    .route(web::post().to(schedule::delete_event))
                    .wrap(SessionAuth),
            )
            .route("/{id}", web::get().to(schedule::get_event)),
    )
    .service(
        web::scope("/album")
            .route("", web::get().to(album::list_items))
            .service(
                web::resource("/upload")
                    .route(web::post().to(album::upload_item))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/edit/{id}")
                    .route(web::post().to(album::edit_item))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/delete/{id}")
                    .route(web::post().to(album::delete_item))
                    .wrap(SessionAuth),
            )
            .route("/{id}", web::get().to(album::get_item)),
    )
    .service(
        web::scope("/comments")
            .wrap(SessionAuth)
            .route("/add/{kind}/{id}", web::post().to(comments::add_comment))
            .route("/edit/{id}", web::post().to(comments::edit_comment))
            .route("/delete/{id}", web::post().to(comments::delete_comment)),
    )
    .service(
        web::scope("/news")
            .route("", web::get().to(news::list_news))
            .service(
                web::resource("/add")
                    .route(web::post().to(news::add_news))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/delete/{id}")
                    .route(web::post().to(news::delete_news))
                    .wrap(SessionAuth),
            ),
    )
    .service(
        web::scope("/members")
            .route("", web::get().to(members::list_members))
            .service(
                web::resource("/register")
                    .route(web::post().to(members::register_member))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/approve/{id}")
                    .route(web::post().to(members::approve_member))
                    .wrap(SessionAuth),
            )
            .service(
                web::resource("/delete/{id}")
                    .route(web::post().to(members::delete_member))
                    .wrap(SessionAuth),
            ),
    );
}
