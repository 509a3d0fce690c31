use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;

pub type MahasiswaResult<T> = Result<T, MahasiswaError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum MahasiswaError {
    #[snafu(display("Error sending request to {}", url))]
    SendRequest { source: reqwest::Error, url: String },
    #[snafu(display("Remote API at {} rejected the request", url))]
    BadStatus { source: reqwest::Error, url: String },
    #[snafu(display("Error decoding response body from {}", url))]
    DecodeBody { source: reqwest::Error, url: String },
    #[snafu(display("Error parsing JSON from {}", url))]
    ParseJson {
        source: serde_json::Error,
        url: String,
    },
    #[snafu(display("Error building HTTP client"))]
    BuildClient { source: reqwest::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to listen on {}", addr))]
    BindListener {
        source: std::io::Error,
        addr: String,
    },
    #[snafu(display("Error serving app"))]
    Serve { source: std::io::Error },
    #[snafu(display("Missing student id"))]
    MissingId,
}

impl MahasiswaError {
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //remote api misbehaved
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::SendRequest { .. } | Self::BadStatus { .. } | Self::DecodeBody { .. } => BG,
            Self::ParseJson { .. } => BG,
            Self::BuildClient { .. } => ISE,
            Self::BadEnvVar { .. } => ISE,
            Self::BindListener { .. } | Self::Serve { .. } => ISE,
            Self::MissingId => BI,
        }
    }
}

impl IntoResponse for MahasiswaError {
    fn into_response(self) -> Response {
        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Error "}
                    span {(desc)}
                }
            }
        };

        let status_code = self.status_code();

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_is_bad_request() {
        let response = MahasiswaError::MissingId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn env_var_errors_are_internal() {
        let err = MahasiswaError::BadEnvVar {
            source: dotenvy::Error::EnvVar(std::env::VarError::NotPresent),
            name: "MAHASISWA_SERVER_IP",
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("MAHASISWA_SERVER_IP"));
    }
}
