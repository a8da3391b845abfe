use std::io::Write;

use tracing::debug;

use crate::{
    domain::{OutputFormat, ParameterPageRequest},
    error::AwsEnvError,
    output::write_parameter,
    storage::repository::ParameterStore,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub parameters: usize,
}

/// Writes every parameter under `request.path`, one page at a time. Each page
/// is flushed before the next one is requested. The first store error stops
/// the export; whatever was already written stays written.
pub async fn export_variables<S, W>(
    store: &S,
    request: ParameterPageRequest,
    format: OutputFormat,
    out: &mut W,
) -> Result<ExportSummary, AwsEnvError>
where
    S: ParameterStore + ?Sized,
    W: Write,
{
    let mut summary = ExportSummary::default();
    let mut next_request = Some(request);

    while let Some(request) = next_request.take() {
        let page = store.get_parameters_by_path(request.clone()).await?;
        summary.pages += 1;

        for parameter in &page.parameters {
            write_parameter(out, &request.path, parameter, format)?;
        }
        out.flush()?;
        summary.parameters += page.parameters.len();

        debug!(
            page = summary.pages,
            count = page.parameters.len(),
            more = page.next_token.is_some(),
            "Exported page of parameters"
        );

        next_request = page.next_token.map(|token| request.with_token(token));
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::Parameter, storage::adapters::local_storage::LocalStorage};

    #[tokio::test]
    async fn test_single_page() {
        let store = LocalStorage::with_parameters(vec![
            Parameter::new("/app/DB_HOST", "x"),
            Parameter::new("/app/DB_PORT", "5432"),
        ]);
        let mut out = Vec::new();

        let summary = export_variables(
            &store,
            ParameterPageRequest::new("/app/", false),
            OutputFormat::Exports,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "export DB_HOST=$'x'\nexport DB_PORT=$'5432'\n"
        );
        assert_eq!(summary, ExportSummary { pages: 1, parameters: 2 });
    }

    #[tokio::test]
    async fn test_empty_path_still_one_request() {
        let store = LocalStorage::new();
        let mut out = Vec::new();

        let summary = export_variables(
            &store,
            ParameterPageRequest::new("/missing", true),
            OutputFormat::Dotenv,
            &mut out,
        )
        .await
        .unwrap();

        assert!(out.is_empty());
        assert_eq!(summary.pages, 1);
        assert_eq!(store.requests().len(), 1);
    }
}
