use onlinesim::{OnlinesimClient, TariffsQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = TariffsQuery {
        filter_service: std::env::var("ONLINESIM_FILTER_SERVICE").ok(),
        lang: std::env::var("ONLINESIM_LANG").ok(),
        ..Default::default()
    };

    let client = OnlinesimClient::new(std::env::var("ONLINESIM_API_KEY").unwrap_or_default());
    let tariffs = client.get_tariffs(&query).await?;

    println!(
        "response: {}, page: {}, end: {}",
        tariffs.response, tariffs.page, tariffs.end
    );
    for (id, country) in &tariffs.countries {
        println!("country {id}: {} (+{})", country.name, country.code);
    }
    for (id, service) in &tariffs.services {
        println!(
            "service {id}: {} — {} available at {}",
            service.name, service.available, service.price
        );
    }

    Ok(())
}
