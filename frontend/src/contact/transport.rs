use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use shared::constants::EMAILJS_API;
use shared::errors::TransportError;
use shared::types::ContactMessage;

use crate::config::{TransportConfig, TransportKind};
use crate::contact::runtime::Runtime;

/// Delivers a sanitized message. Resolves once the relay has accepted or
/// refused it; it has no timeout of its own.
pub trait Transport {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), TransportError>>;
}

pub fn build_transport(kind: TransportKind, config: TransportConfig, runtime: Rc<dyn Runtime>) -> Rc<dyn Transport> {
    match kind {
        TransportKind::EmailJs => Rc::new(EmailJsTransport::new(config)),
        TransportKind::Mock => {
            log::warn!("contact form uses the mock transport, nothing will be delivered");
            Rc::new(MockTransport::new(runtime, 1500, true))
        }
    }
}

// ===

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

pub struct EmailJsTransport {
    config: TransportConfig,
}

impl EmailJsTransport {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl Transport for EmailJsTransport {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), TransportError>> {
        let config = self.config.clone();
        async move {
            if let Some(name) = config.missing() {
                return Err(TransportError::MissingConfig(name));
            }
            let body = serde_wasm_bindgen::to_value(&EmailJsRequest {
                service_id: &config.service_id,
                template_id: &config.template_id,
                user_id: &config.public_key,
                template_params: &message,
            }).map_err(|err| TransportError::Encoding(err.to_string()))?;

            let (status, text) = post_json(EMAILJS_API, body).await
                .map_err(|err| TransportError::Network(format!("{:?}", err)))?;

            if (200..300).contains(&status) {
                Ok(())
            } else {
                Err(TransportError::Rejected { status, text })
            }
        }.boxed_local()
    }
}

async fn post_json(url: &str, data: JsValue) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    let data = js_sys::JSON::stringify(&data)?;
    opts.set_body(&JsValue::from(data));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default();

    Ok((resp.status(), text))
}

// ===

/// Stand-in relay for local development: settles after `delay_ms`.
pub struct MockTransport {
    runtime: Rc<dyn Runtime>,
    delay_ms: u32,
    succeed: bool,
}

impl MockTransport {
    pub fn new(runtime: Rc<dyn Runtime>, delay_ms: u32, succeed: bool) -> Self {
        Self { runtime, delay_ms, succeed }
    }
}

impl Transport for MockTransport {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), TransportError>> {
        log::info!("mock send after {}ms: subject {:?}, {} chars", self.delay_ms, message.subject, message.message.chars().count());
        let delay = self.runtime.sleep(self.delay_ms);
        let succeed = self.succeed;
        async move {
            delay.await;
            if succeed {
                Ok(())
            } else {
                Err(TransportError::Rejected {
                    status: 500,
                    text: "Failed to send message. Please try again".to_string(),
                })
            }
        }.boxed_local()
    }
}
