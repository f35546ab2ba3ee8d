use std::error::Error;

use clap::Parser;
use sequent::{DEFAULT_HOST, DEFAULT_PORT, QueryClient, QueryResult};

#[derive(Debug, Parser)]
#[command(version, about = "Make requests to a Sequent server.")]
struct Cli {
    /// Host of the Sequent server
    #[arg(long, short = 'H', default_value_t = DEFAULT_HOST.to_string())]
    host: String,

    /// Port of the Sequent server
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// The query to execute
    #[arg(long, short)]
    query: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut client = QueryClient::connect(&cli.host, cli.port)?;
    let result = client.exec_query(&cli.query)?;

    print_result(&result);
    Ok(())
}

/// Renders rows as a `|`-separated table with columns padded to the widest
/// value seen in that column.
fn print_result(result: &QueryResult) {
    if result.row_count() == 0 {
        println!("(empty result set)");
        return;
    }

    let mut widths = vec![0; result.column_count() as usize];
    let rows = result
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(column, value)| {
                    let s = value.to_string();
                    if s.len() > widths[column] {
                        widths[column] = s.len();
                    }
                    s
                })
                .collect::<Vec<String>>()
        })
        .collect::<Vec<Vec<String>>>();

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(column, s)| format!("{s:<width$}", width = widths[column]))
            .collect::<Vec<String>>()
            .join("|");
        println!("{line}");
    }
}
