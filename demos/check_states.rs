use std::io;

use onlinesim::OnlinesimClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ONLINESIM_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ONLINESIM_API_KEY environment variable is required",
        )
    })?;
    let tzid = std::env::var("ONLINESIM_TZID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "ONLINESIM_TZID environment variable is required",
            )
        })?
        .parse::<i64>()?;
    let message_to_code = std::env::var("ONLINESIM_MESSAGE_TO_CODE")
        .unwrap_or_else(|_| "1".to_owned())
        .parse::<i64>()?;

    let client = OnlinesimClient::new(api_key);
    let states = client.get_number_states(tzid, message_to_code).await?;

    if states.is_empty() {
        println!("no states yet for tzid {tzid}");
    }
    for state in states {
        println!(
            "{} {} [{}]: {} (sum: {}, time: {})",
            state.number, state.response, state.form, state.msg, state.sum, state.time
        );
    }

    Ok(())
}
