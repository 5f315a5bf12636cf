//! Settings reporter binary

use settings_report::telemetry;
use settings_report_http::{Cli, handle_cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    telemetry::init();
    let cli = Cli::parse_normalized();
    handle_cli(cli).await;
}
