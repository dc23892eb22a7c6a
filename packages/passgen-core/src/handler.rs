use crate::{
    config::PasswordConfig,
    error::PasswordRequestError,
    gateway::{GatewayRequest, GatewayResponse, PasswordResponse},
    parameters::PasswordParameters,
    password::random_password,
};

/// Handle a password request from the gateway
///
/// Always produces a response, any failure while parsing the request or
/// generating the password is logged and returned as a 500 error response
#[tracing::instrument(skip_all)]
pub fn handle(config: &PasswordConfig, request: &GatewayRequest) -> GatewayResponse {
    match generate_response(config, request) {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(error = %error, "error processing request");
            GatewayResponse::error(error.to_string())
        }
    }
}

fn generate_response(
    config: &PasswordConfig,
    request: &GatewayRequest,
) -> Result<GatewayResponse, PasswordRequestError> {
    let parameters =
        PasswordParameters::from_body(request.body.as_deref(), request.is_base64_encoded)?;
    let length = parameters.effective_length(config)?;
    let password = random_password(length);

    let response = GatewayResponse::success(&PasswordResponse { password, length })?;
    Ok(response)
}
