use std::sync::{Arc, Mutex};

use crate::{
    domain::{Parameter, ParameterPage, ParameterPageRequest},
    storage::repository::{ParameterStore, StoreError},
};

const DEFAULT_PAGE_SIZE: usize = 10;

/// In-memory parameter store with the paging and path rules of SSM.
/// Tokens are opaque offsets into the matching parameters.
#[derive(Clone)]
pub struct LocalStorage {
    parameters: Arc<Vec<Parameter>>,
    page_size: usize,
    fail_on_request: Option<usize>,
    requests: Arc<Mutex<Vec<ParameterPageRequest>>>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::with_parameters(Vec::new())
    }

    pub fn with_parameters(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters: Arc::new(parameters),
            page_size: DEFAULT_PAGE_SIZE,
            fail_on_request: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Makes the n-th request (zero based) fail with `QueryFailed`.
    pub fn fail_on_request(mut self, request_index: usize) -> Self {
        self.fail_on_request = Some(request_index);
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ParameterPageRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn matches_path(parameter: &Parameter, path: &str, recursive: bool) -> bool {
        let prefix = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        };

        match parameter.name().strip_prefix(&prefix) {
            Some(rest) if !rest.is_empty() => recursive || !rest.contains('/'),
            _ => false,
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ParameterStore for LocalStorage {
    async fn get_parameters_by_path(
        &self,
        request: ParameterPageRequest,
    ) -> Result<ParameterPage, StoreError> {
        let request_index = {
            let mut requests = self
                .requests
                .lock()
                .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
            requests.push(request.clone());
            requests.len() - 1
        };

        if self.fail_on_request == Some(request_index) {
            return Err(StoreError::QueryFailed(format!(
                "Request {} for path '{}' rejected",
                request_index, request.path
            )));
        }

        let offset = match &request.next_token {
            Some(token) => token.parse::<usize>().map_err(|_| {
                StoreError::QueryFailed(format!("Invalid next token '{}'", token))
            })?,
            None => 0,
        };

        let matching: Vec<&Parameter> = self
            .parameters
            .iter()
            .filter(|p| Self::matches_path(p, &request.path, request.recursive))
            .collect();

        let end = (offset + self.page_size).min(matching.len());
        let parameters = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|p| (*p).clone())
            .collect();

        Ok(ParameterPage {
            parameters,
            next_token: (end < matching.len()).then(|| end.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> LocalStorage {
        LocalStorage::with_parameters(vec![
            Parameter::new("/app/A", "1"),
            Parameter::new("/app/B", "2"),
            Parameter::new("/app/nested/C", "3"),
            Parameter::new("/application/D", "4"),
        ])
    }

    #[tokio::test]
    async fn test_non_recursive_lists_direct_children() {
        let page = storage()
            .get_parameters_by_path(ParameterPageRequest::new("/app", false))
            .await
            .unwrap();

        let names: Vec<_> = page.parameters.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["/app/A", "/app/B"]);
        assert!(page.next_token.is_none());
    }

    #[tokio::test]
    async fn test_recursive_includes_nested() {
        let page = storage()
            .get_parameters_by_path(ParameterPageRequest::new("/app/", true))
            .await
            .unwrap();

        assert_eq!(page.parameters.len(), 3);
    }

    #[tokio::test]
    async fn test_pages_follow_tokens() {
        let storage = storage().page_size(2);
        let first = ParameterPageRequest::new("/app", true);

        let page = storage.get_parameters_by_path(first.clone()).await.unwrap();
        assert_eq!(page.parameters.len(), 2);
        let token = page.next_token.unwrap();

        let page = storage
            .get_parameters_by_path(first.with_token(token))
            .await
            .unwrap();
        assert_eq!(page.parameters, vec![Parameter::new("/app/nested/C", "3")]);
        assert!(page.next_token.is_none());
        assert_eq!(storage.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let request = ParameterPageRequest::new("/app", true).with_token("garbage");
        let err = storage().get_parameters_by_path(request).await.unwrap_err();
        assert!(matches!(err, StoreError::QueryFailed(_)));
    }

    #[tokio::test]
    async fn test_fail_on_request() {
        let storage = storage().fail_on_request(0);
        let result = storage
            .get_parameters_by_path(ParameterPageRequest::new("/app", true))
            .await;
        assert!(result.is_err());
        assert_eq!(storage.requests().len(), 1);
    }
}
