use anyhow::{Result as AnyResult, bail};
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ssm::{
    Client,
    error::{DisplayErrorContext, SdkError},
    types::Parameter as SsmParameter,
};
use aws_types::region::Region;
use tracing::debug;

use crate::{
    configs::SsmStoreConfig,
    domain::{Parameter, ParameterPage, ParameterPageRequest},
    storage::repository::{ParameterStore, StoreError},
};

#[derive(Clone)]
pub struct SsmStorage {
    client: Client,
}

impl SsmStorage {
    pub async fn new(config: SsmStoreConfig) -> AnyResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;
        ensure_region(&shared_config)?;

        Ok(Self::with_client(Client::new(&shared_config)))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for SsmStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmStorage")
            .field("region", &self.client.config().region())
            .finish()
    }
}

fn ensure_region(config: &SdkConfig) -> AnyResult<()> {
    if config.region().is_none() {
        bail!("No AWS region resolved. Set AWS_REGION or configure a region for the AWS profile");
    }
    Ok(())
}

fn into_parameter(parameter: SsmParameter) -> Result<Parameter, StoreError> {
    match (parameter.name, parameter.value) {
        (Some(name), Some(value)) => Ok(Parameter::new(name, value)),
        (Some(name), None) => Err(StoreError::InvalidResponse(format!(
            "Parameter '{}' has no value",
            name
        ))),
        (None, _) => Err(StoreError::InvalidResponse(
            "Parameter without a name in response".to_string(),
        )),
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmStorage {
    async fn get_parameters_by_path(
        &self,
        request: ParameterPageRequest,
    ) -> Result<ParameterPage, StoreError> {
        debug!(
            path = request.path.as_str(),
            recursive = request.recursive,
            has_token = request.next_token.is_some(),
            "Requesting parameters by path from SSM"
        );

        let output = self
            .client
            .get_parameters_by_path()
            .path(&request.path)
            .recursive(request.recursive)
            .with_decryption(request.with_decryption)
            .set_next_token(request.next_token)
            .send()
            .await
            .map_err(|err| {
                let message = format!(
                    "Failed to get parameters by path '{}': {}",
                    request.path,
                    DisplayErrorContext(&err)
                );
                match err {
                    SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
                        StoreError::ConnectionFailed(message)
                    }
                    _ => StoreError::QueryFailed(message),
                }
            })?;

        let parameters = output
            .parameters
            .unwrap_or_default()
            .into_iter()
            .map(into_parameter)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParameterPage {
            parameters,
            next_token: output.next_token,
        })
    }
}
