use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::CollectorSettings,
    routes::{ad_route, creative_route, default_route},
    services::{MetaAdLibraryClient, RecraftClient, TogetherClient},
};

pub fn run(
    listener: TcpListener,
    ad_library: MetaAdLibraryClient,
    together: TogetherClient,
    recraft: RecraftClient,
    collector_settings: CollectorSettings,
) -> Result<Server, std::io::Error> {
    let ad_library = web::Data::new(ad_library);
    let together = web::Data::new(together);
    let recraft = web::Data::new(recraft);
    let collector_settings = web::Data::new(collector_settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(
                web::scope("/ads")
                    .service(ad_route::analyze_competitor_ads)
                    .service(ad_route::generate_ad_ideas),
            )
            .service(
                web::scope("/creative")
                    .service(creative_route::generate_marketing_text)
                    .service(creative_route::generate_marketing_image),
            )
            .app_data(ad_library.clone())
            .app_data(together.clone())
            .app_data(recraft.clone())
            .app_data(collector_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
