use std::future::{ready, Ready};

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use futures::future::LocalBoxFuture;
use serde_json::json;

/// Catch-all for faults no more specific handler claimed. Registered as the
/// outermost stage of the pipeline: it logs the fault at error level and
/// replaces it with a fixed 500 response, so internal detail (error messages,
/// connection strings, traces) never reaches the client.
///
/// Deliberate error responses with a non-500 status pass through untouched.
pub struct FaultBoundary;

impl<S, B> Transform<S, ServiceRequest> for FaultBoundary
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = FaultBoundaryMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(FaultBoundaryMiddleware { service }))
    }
}

pub struct FaultBoundaryMiddleware<S> {
    service: S,
}

fn generic_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "detail": "Internal Server Error" }))
}

impl<S, B> Service<ServiceRequest> for FaultBoundaryMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Only cheap copies here; the request itself must stay uniquely
        // owned by the inner service or the router cannot mutate its
        // match info.
        let method = req.method().clone();
        let path = req.path().to_owned();
        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    // Handler errors are rendered into a response that still
                    // carries the original error object; a 500 with one
                    // attached means nothing upstream claimed the fault.
                    if res.status() == StatusCode::INTERNAL_SERVER_ERROR {
                        if let Some(err) = res.response().error() {
                            log::error!("unhandled error on {} {}: {}", method, path, err);
                            let (req, _) = res.into_parts();
                            return Ok(ServiceResponse::new(req, generic_error_response()));
                        }
                    }
                    Ok(res.map_into_boxed_body())
                }
                Err(err) => {
                    // The cause is wrapped with the fixed response attached,
                    // so the transport renders the generic body and the
                    // original detail goes no further than the log.
                    log::error!("unhandled error on {} {}: {}", method, path, err);
                    Err(InternalError::from_response(err, generic_error_response()).into())
                }
            }
        })
    }
}
