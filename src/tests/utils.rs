use crate::catalog::Catalog;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Drives the router directly, the way the serve loop would.
pub fn get(catalog: &Catalog, uri: &str) -> Result<Response, crate::errors::ServerError> {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, catalog)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn test_catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog must load")
}
