//! Prints the plans of a plan-tracking server, and the calendar of the tasks of one of them.
//!
//! Usage: `plan-board [PLAN_ID] [YYYY-MM]`
//!
//! The server URL is read from the `PLAN_BOARD_URL` environment variable (`http://127.0.0.1:5000` by default).
//! You can also set the RUST_LOG environment variable to display more info.

use std::error::Error;

use plan_board::calendar::MonthCursor;
use plan_board::config;
use plan_board::feedback::Notice;
use plan_board::utils::{parse_date, print_calendar, print_plan_list, print_task_list};
use plan_board::{Board, Client};


#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    if let Ok(url) = std::env::var(config::API_URL_ENV_VAR) {
        if let Ok(mut configured) = config::API_URL.lock() {
            *configured = url;
        }
    }

    let mut args = std::env::args().skip(1);
    let plan_id = match args.next() {
        None => None,
        Some(arg) => Some(arg.parse::<u64>().map_err(|err| format!("Invalid plan ID {:?}: {}", arg, err))?),
    };
    let cursor = match args.next() {
        None => MonthCursor::today(),
        Some(arg) => {
            let date = parse_date(&format!("{}-01", arg)).ok_or_else(|| format!("Invalid month {:?}, expected YYYY-MM", arg))?;
            MonthCursor::containing(date)
        },
    };

    let client = Client::from_config()?;
    println!("Using server {}", client.url());
    let mut board = Board::new(client, cursor);

    if board.load_plans().await == false {
        return Err(board.last_notice().to_string().into());
    }
    println!("---- Plans -----");
    print_plan_list(board.plans());

    if let Some(plan_id) = plan_id {
        board.select_plan(plan_id).await;
        if let Notice::Error(text) = board.last_notice() {
            return Err(text.clone().into());
        }
        println!("---- Tasks of plan {} -----", plan_id);
        print_task_list(board.tasks());
    }

    println!();
    print_calendar(board.grid(), board.marks());
    Ok(())
}
