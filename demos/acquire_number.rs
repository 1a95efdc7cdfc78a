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
    let service = std::env::var("ONLINESIM_SERVICE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ONLINESIM_SERVICE environment variable is required (e.g. whatsapp)",
        )
    })?;
    let country = std::env::var("ONLINESIM_COUNTRY")
        .unwrap_or_else(|_| "7".to_owned())
        .parse::<u32>()?;

    let client = OnlinesimClient::new(api_key);
    let acquisition = client.acquire_number(&service, country).await?;

    println!(
        "response: {}, response_text: {}, tzid: {}, number: {}, title: {}",
        acquisition.response,
        acquisition.response_text,
        acquisition.tzid,
        acquisition.number,
        acquisition.title
    );

    Ok(())
}
