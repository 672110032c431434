//! Static "about" endpoint listing the service developers.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// One developer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Developer {
    #[schema(example = "dave")]
    pub firstname: String,
    #[schema(example = "cohen")]
    pub lastname: String,
    #[schema(example = 234234)]
    pub id: u64,
    #[schema(example = "daddd@gmail.com")]
    pub email: String,
}

fn developers() -> Vec<Developer> {
    [
        ("dave", "cohen", 234_234, "daddd@gmail.com"),
        ("tal", "levy", 34_534_544, "tal@gmail.com"),
    ]
    .into_iter()
    .map(|(firstname, lastname, id, email)| Developer {
        firstname: firstname.to_owned(),
        lastname: lastname.to_owned(),
        id,
        email: email.to_owned(),
    })
    .collect()
}

/// List the developers of this service.
#[utoipa::path(
    get,
    path = "/about",
    responses((status = 200, description = "Developers", body = [Developer])),
    tags = ["about"],
    operation_id = "about"
)]
#[get("/about")]
pub async fn about() -> web::Json<Vec<Developer>> {
    web::Json(developers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[actix_web::test]
    async fn lists_developers_with_original_field_names() {
        let app = test::init_service(App::new().service(about)).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/about").to_request()).await;
        assert!(res.status().is_success());

        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body[0],
            json!({
                "firstname": "dave",
                "lastname": "cohen",
                "id": 234234,
                "email": "daddd@gmail.com",
            })
        );
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }
}
