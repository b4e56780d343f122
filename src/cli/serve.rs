use crate::{error, server};

pub async fn serve(addr: Option<String>) {
    if let Err(e) = server::start_api_server(addr).await {
        error!("Server stopped. Err: {}", e);
    }
}
