//! Excel Data API binary
//!
//! Serves sheet names, row labels, and row sums from one spreadsheet file.

use std::path::PathBuf;

use clap::Parser;
use excel_data_api::api::{
    run_api_server, ApiConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_WORKBOOK_PATH,
};

#[derive(Parser, Debug)]
#[command(name = "excel-data-api")]
#[command(version)]
#[command(about = "Excel Data API - read-only HTTP API over a spreadsheet file")]
#[command(long_about = r#"
Excel Data API - read-only HTTP API over a spreadsheet file

Endpoints:
  - GET /list_tables                                - Sheet names in file order
  - GET /get_table_details?table_name=T             - Row labels of sheet T
  - GET /row_sum?table_name=T&row_name=R            - Sum of the numbers in row R

Additional endpoints:
  - GET /health                                     - Health check
  - GET /version                                    - Server version info
  - GET /                                           - Welcome message

The workbook is re-read on every request. Supported formats: xls, xlsx,
xlsm, xlsb, ods.

Example usage:
  excel-data-api                                    # ./Data/capbudg.xls on localhost:9090
  excel-data-api --file budget.xlsx --host 0.0.0.0 --port 3000

  curl 'http://localhost:9090/row_sum?table_name=CapBudg&row_name=Initial%20Investment'
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = DEFAULT_HOST, env = "EXCEL_API_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "EXCEL_API_PORT")]
    port: u16,

    /// Spreadsheet file to serve
    #[arg(short, long, default_value = DEFAULT_WORKBOOK_PATH, env = "EXCEL_API_FILE")]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        workbook_path: args.file,
    };

    run_api_server(config).await
}
