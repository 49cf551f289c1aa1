use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let message = match &err {
        ServerError::NoSession => {
            "No listings have been uploaded yet. Upload a CSV to get started.".to_string()
        }
        other => other.to_string(),
    };

    render_error(err.status(), &message)
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let html = maud::html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to upload" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.to_string())
        .body(Body::from(html.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn body_of(resp: Response) -> String {
        let mut body = String::new();
        resp.into_body().reader().read_to_string(&mut body).unwrap();
        body
    }

    #[test]
    fn status_follows_error_kind() {
        assert_eq!(html_error_response(ServerError::NotFound).status(), 404);
        assert_eq!(
            html_error_response(ServerError::MalformedInput("bad quote".into())).status(),
            400
        );
        assert_eq!(html_error_response(ServerError::InternalError).status(), 500);
    }

    #[test]
    fn message_is_escaped() {
        let resp = html_error_response(ServerError::BadRequest("<script>".into()));
        let body = body_of(resp);
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }
}
