//! Instance metadata and health endpoints.

use reqwest::{Method, StatusCode};
use weaviate_core::{Meta, OpenIdConfiguration};

use crate::http::{server_error, Transport, NO_BODY};
use crate::Result;

pub struct Misc {
    transport: Transport,
}

impl Misc {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn meta_getter(&self) -> MetaGetter {
        MetaGetter {
            transport: self.transport.clone(),
        }
    }

    pub fn live_checker(&self) -> LiveChecker {
        LiveChecker {
            transport: self.transport.clone(),
        }
    }

    pub fn ready_checker(&self) -> ReadyChecker {
        ReadyChecker {
            transport: self.transport.clone(),
        }
    }

    pub fn open_id_config_getter(&self) -> OpenIdConfigGetter {
        OpenIdConfigGetter {
            transport: self.transport.clone(),
        }
    }
}

/// `GET /meta`
pub struct MetaGetter {
    transport: Transport,
}

impl MetaGetter {
    pub async fn run(self) -> Result<Meta> {
        self.transport.json(Method::GET, &["meta"], NO_BODY).await
    }
}

/// `GET /.well-known/live`
pub struct LiveChecker {
    transport: Transport,
}

impl LiveChecker {
    pub async fn run(self) -> Result<bool> {
        let response = self
            .transport
            .send(Method::GET, &[".well-known", "live"], NO_BODY)
            .await?;
        Ok(response.status() == StatusCode::OK)
    }
}

/// `GET /.well-known/ready`; an instance still starting up answers 503
pub struct ReadyChecker {
    transport: Transport,
}

impl ReadyChecker {
    pub async fn run(self) -> Result<bool> {
        let response = self
            .transport
            .send(Method::GET, &[".well-known", "ready"], NO_BODY)
            .await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::SERVICE_UNAVAILABLE => Ok(false),
            _ => Err(server_error(response).await),
        }
    }
}

/// `GET /.well-known/openid-configuration`; `None` when auth is disabled
pub struct OpenIdConfigGetter {
    transport: Transport,
}

impl OpenIdConfigGetter {
    pub async fn run(self) -> Result<Option<OpenIdConfiguration>> {
        self.transport
            .optional(Method::GET, &[".well-known", "openid-configuration"], NO_BODY)
            .await
    }
}
