//! Client-side API calls.
//!
//! Browser builds talk to the server with `fetch`; the SSR stubs return an
//! error and are never reached because callers only run from event handlers.

use serde::{Deserialize, Serialize};

use crate::auth::{ErrorResponse, LoginRequest, LoginResponse};

/// Body of a `/api/login` reply, success or failure
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LoginReply {
    Ok(LoginResponse),
    Err(ErrorResponse),
}

impl LoginReply {
    pub fn into_result(self) -> Result<LoginResponse, String> {
        match self {
            LoginReply::Ok(resp) => Ok(resp),
            LoginReply::Err(e) => Err(e.error),
        }
    }
}

/// POST /api/login
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, String> {
    post_json::<_, LoginReply>("/api/login", request)
        .await?
        .into_result()
}

/// POST JSON to a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
    url: &str,
    body: &T,
) -> Result<R, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let body_str = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body_str));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{:?}", e))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
    _url: &str,
    _body: &T,
) -> Result<R, String> {
    Err("post_json is only available in browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_reply_parses_both_shapes() {
        let ok: LoginReply = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();
        assert_eq!(
            ok.into_result(),
            Ok(LoginResponse {
                username: "admin".into()
            })
        );

        let err: LoginReply =
            serde_json::from_str(r#"{"error":"invalid username or password"}"#).unwrap();
        assert_eq!(
            err.into_result(),
            Err("invalid username or password".to_string())
        );
    }
}
