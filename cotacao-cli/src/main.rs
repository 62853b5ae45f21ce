//! Cotacao CLI
//!
//! Single-shot client: asks the local quote server for the current bid and
//! writes `Dólar: <bid>` to `cotacao.txt`, replacing any previous content.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::AsyncWriteExt;

use cotacao_client::{ClientError, CotacaoClient};

const OUTPUT_FILE: &str = "cotacao.txt";

#[derive(Parser)]
#[command(name = "cotacao")]
#[command(author, version, about = "Saves the current USD/BRL bid to cotacao.txt", long_about = None)]
struct Cli {}

/// One failure category per step of the run.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("Erro ao criar requisição: {0}")]
    Request(ClientError),

    #[error("Erro ao fazer requisição: {0}")]
    Fetch(ClientError),

    #[error("Erro ao decodificar JSON: {0}")]
    Decode(ClientError),

    #[error("Erro ao criar arquivo: {0}")]
    CreateFile(std::io::Error),

    #[error("Erro ao escrever no arquivo: {0}")]
    WriteFile(std::io::Error),
}

impl From<ClientError> for RunError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(_) => RunError::Request(err),
            ClientError::Json(_) => RunError::Decode(err),
            ClientError::Http(_) | ClientError::Timeout(_) => RunError::Fetch(err),
        }
    }
}

fn format_line(bid: &str) -> String {
    format!("Dólar: {}\n", bid)
}

/// Fetches the bid and writes it to `output`.
///
/// The file is only created once a bid has been decoded, so a failed call
/// leaves any previous file as it was.
async fn run(client: &CotacaoClient, output: &Path) -> Result<String, RunError> {
    let response = client.get_bid().await?;

    let mut file = tokio::fs::File::create(output)
        .await
        .map_err(RunError::CreateFile)?;
    file.write_all(format_line(&response.bid).as_bytes())
        .await
        .map_err(RunError::WriteFile)?;
    file.flush().await.map_err(RunError::WriteFile)?;

    Ok(response.bid)
}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    let client = CotacaoClient::default();

    match run(&client, Path::new(OUTPUT_FILE)).await {
        Ok(_) => {
            println!("Cotação salva com sucesso em {}", OUTPUT_FILE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("5.43"), "Dólar: 5.43\n");
    }

    #[test]
    fn test_cli_takes_no_arguments() {
        assert!(Cli::try_parse_from(["cotacao"]).is_ok());
        assert!(Cli::try_parse_from(["cotacao", "--url", "x"]).is_err());
    }

    #[tokio::test]
    async fn test_run_writes_bid_line() {
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(r#"{"bid":"5.43"}"#))
                .await;
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join(OUTPUT_FILE);

        let bid = run(&CotacaoClient::new(server.uri()), &output)
            .await
            .unwrap();

        assert_eq!(bid, "5.43");
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dólar: 5.43\n");
    }

    #[tokio::test]
    async fn test_run_overwrites_previous_file() {
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(r#"{"bid":"5.5"}"#))
                .await;
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join(OUTPUT_FILE);
        std::fs::write(&output, "Dólar: 4.99999999\nold line\n").unwrap();

        run(&CotacaoClient::new(server.uri()), &output)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dólar: 5.5\n");
    }

    #[tokio::test]
    async fn test_unreachable_server_leaves_file_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join(OUTPUT_FILE);
        std::fs::write(&output, "Dólar: 5.00\n").unwrap();

        let err = run(&CotacaoClient::new("http://127.0.0.1:1"), &output)
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Fetch(_)));
        assert!(err.to_string().starts_with("Erro ao fazer requisição:"));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dólar: 5.00\n");
    }

    #[tokio::test]
    async fn test_bad_json_does_not_create_file() {
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string("{\"bid\":")).await;
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join(OUTPUT_FILE);

        let err = run(&CotacaoClient::new(server.uri()), &output)
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Decode(_)));
        assert!(err.to_string().starts_with("Erro ao decodificar JSON:"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"bid":"5.43"}"#)
                .set_delay(Duration::from_millis(600)),
        )
        .await;
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join(OUTPUT_FILE);

        let err = run(&CotacaoClient::new(server.uri()), &output)
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Fetch(ClientError::Timeout(_))));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_server_error_body_is_reported_as_decode_failure() {
        let server = create_mock_server(
            ResponseTemplate::new(500).set_body_string("Erro ao buscar cotação\n"),
        )
        .await;
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join(OUTPUT_FILE);
        std::fs::write(&output, "Dólar: 5.00\n").unwrap();

        let err = run(&CotacaoClient::new(server.uri()), &output)
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Decode(ClientError::Json(_))));
        assert!(err.to_string().starts_with("Erro ao decodificar JSON:"));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dólar: 5.00\n");
    }

    #[tokio::test]
    async fn test_unwritable_location_reports_create_error() {
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(r#"{"bid":"5.43"}"#))
                .await;
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("missing-dir").join(OUTPUT_FILE);

        let err = run(&CotacaoClient::new(server.uri()), &output)
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::CreateFile(_)));
        assert!(err.to_string().starts_with("Erro ao criar arquivo:"));
    }
}
