//! Demo binary: boots the kitchen board, walks a couple of orders through
//! the lifecycle, and prints the resulting view.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use kitchen_board::engine::SortMode;
use kitchen_board::lifecycle::{setup_tracing, KitchenSystem};
use kitchen_board::model::{Crust, OrderDraft, Priority, ServiceType, Size};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting kitchen board");
    let system = KitchenSystem::with_defaults();
    let board = &system.board_client;

    let draft = OrderDraft {
        priority: Priority::High,
        size: Size::Large,
        crust: Crust::Thin,
        modifications: vec!["Extra Cheese".to_string()],
        items: vec!["Pepperoni".to_string(), "Mushrooms".to_string()],
        service_type: ServiceType::DineIn,
        eta_minutes: 15,
    };

    let span = tracing::info_span!("order_lifecycle");
    async {
        let id = board.create(draft).await.map_err(|e| e.to_string())?;
        info!(%id, "Order created");

        // Queued -> InProgress -> Ready; the second advance schedules the
        // ready notification.
        board.advance(id.clone()).await.map_err(|e| e.to_string())?;
        board.advance(id.clone()).await.map_err(|e| e.to_string())?;
        info!(%id, "Order walked to ready");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let view = board
        .projection(SortMode::Eta)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        queued = view.queued.len(),
        in_progress = view.in_progress.len(),
        ready = view.ready.len(),
        "Current board"
    );

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
