use utoipa::OpenApi;

use crate::api;
use crate::domain::dto;
use crate::models::book::BookGenre;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::create_book,
        api::books::get_book,
        api::books::update_book,
        api::books::delete_book,
        api::books::list_books_by_author,
        api::authors::list_authors,
        api::authors::create_author,
        api::authors::get_author,
        api::publishers::list_publishers,
        api::publishers::create_publisher,
    ),
    components(
        schemas(
            dto::BookDto,
            dto::AuthorDto,
            dto::CreateBookRequest,
            dto::UpdateBookRequest,
            BookGenre,
            api::authors::CreateAuthorRequest,
            api::publishers::CreatePublisherRequest,
        )
    ),
    tags(
        (name = "libris", description = "Libris catalog API")
    )
)]
pub struct ApiDoc;
