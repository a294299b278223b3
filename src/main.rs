use std::net::TcpListener;

use adscout::{
    configuration::get_configuration,
    services::{MetaAdLibraryClient, RecraftClient, TogetherClient},
    startup::run,
};
use env_logger::Env;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let ad_library = MetaAdLibraryClient::new(configuration.api_keys.rapidapi);
    let together = TogetherClient::new(configuration.api_keys.together);
    let recraft = RecraftClient::new(configuration.api_keys.recraft);

    run(
        listener,
        ad_library,
        together,
        recraft,
        configuration.collector,
    )?
    .await
}
