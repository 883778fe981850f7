//! Booking flow tests exercising the service layer in-process

use std::sync::Arc;

use rust_decimal::Decimal;

use flexistay_server::{
    catalog::Catalog,
    config::BookingConfig,
    error::AppError,
    models::{DraftField, DurationTier, Severity},
    services::Services,
};

fn services_with_close_delay(auto_close_secs: u64) -> Services {
    Services::new(
        Arc::new(Catalog::with_default_units()),
        BookingConfig { auto_close_secs },
    )
}

fn services() -> Services {
    // Long delay so no session disappears mid-test
    services_with_close_delay(60)
}

async fn fill_required(services: &Services) {
    services
        .bookings
        .update_field(DraftField::CheckInDate, "2025-06-01")
        .await
        .unwrap();
    services
        .bookings
        .update_field(DraftField::CustomerName, "Budi")
        .await
        .unwrap();
    services
        .bookings
        .update_field(DraftField::CustomerPhone, "081234567890")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_units_preserves_seed_order() {
    let services = services();
    let units = services.units.list_units();

    assert_eq!(units.len(), 3);
    assert_eq!(units[0].id, 1);
    assert_eq!(units[1].id, 2);
    assert_eq!(units[2].id, 3);
}

#[tokio::test]
async fn test_get_unknown_unit_is_not_found() {
    let services = services();
    assert!(matches!(
        services.units.get_unit(42),
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_quote_options_cover_all_tiers() {
    let services = services();
    let options = services.units.quote_options(1).unwrap();

    assert_eq!(options.len(), 4);
    assert_eq!(options[0].duration, DurationTier::FourHours);
    assert_eq!(options[0].total_price, Decimal::from(150000));
    assert_eq!(options[1].total_price, Decimal::from(270000));
    assert_eq!(options[2].total_price, Decimal::from(375000));
    assert_eq!(options[3].duration, DurationTier::OneDay);
    assert_eq!(options[3].total_price, Decimal::from(600000));
}

#[tokio::test]
async fn test_booking_confirmed_end_to_end() {
    let services = services();
    let mut notifications = services.notifications.subscribe();

    let session = services.bookings.open(1).await.unwrap();
    assert_eq!(session.unit_id, 1);
    assert_eq!(session.draft.guest_count, 1);
    assert_eq!(session.draft.duration, DurationTier::FourHours);

    fill_required(&services).await;
    services
        .bookings
        .update_field(DraftField::Duration, "8h")
        .await
        .unwrap();

    let booking = services.bookings.submit().await.unwrap();
    assert_eq!(booking.unit.name, "Studio Margonda 1");
    assert_eq!(booking.quote.total_price, Decimal::from(270000));
    assert_eq!(booking.quote.multiplier, Decimal::new(18, 1));

    let notice = notifications.recv().await.unwrap();
    assert_eq!(notice.title, "Booking Confirmed");
    assert_eq!(notice.severity, Severity::Info);
    assert!(notice.description.contains("Studio Margonda 1"));
}

#[tokio::test]
async fn test_submit_with_missing_fields_is_rejected() {
    let services = services();
    let mut notifications = services.notifications.subscribe();

    services.bookings.open(1).await.unwrap();
    services
        .bookings
        .update_field(DraftField::CheckInDate, "2025-06-01")
        .await
        .unwrap();
    services
        .bookings
        .update_field(DraftField::CustomerPhone, "081234567890")
        .await
        .unwrap();
    // customer_name left empty

    let err = services.bookings.submit().await.unwrap_err();
    assert!(matches!(err, AppError::IncompleteData));

    let notice = notifications.recv().await.unwrap();
    assert_eq!(notice.title, "Incomplete Data");
    assert_eq!(notice.severity, Severity::Error);

    // Session stays editable; completing the draft makes submit succeed
    services
        .bookings
        .update_field(DraftField::CustomerName, "Budi")
        .await
        .unwrap();
    assert!(services.bookings.submit().await.is_ok());
}

#[tokio::test]
async fn test_guest_count_and_email_are_never_validated() {
    let services = services();

    services.bookings.open(1).await.unwrap();
    fill_required(&services).await;

    // Capacity of unit 1 is 2; a draft for 10 guests with a malformed
    // email still confirms. The rules collect both fields but never
    // check them.
    services
        .bookings
        .update_field(DraftField::GuestCount, "10")
        .await
        .unwrap();
    services
        .bookings
        .update_field(DraftField::CustomerEmail, "not-an-email")
        .await
        .unwrap();

    let booking = services.bookings.submit().await.unwrap();
    assert_eq!(booking.draft.guest_count, 10);
    assert_eq!(booking.draft.customer_email, "not-an-email");
}

#[tokio::test]
async fn test_unavailable_unit_cannot_be_opened() {
    let services = services();

    let err = services.bookings.open(3).await.unwrap_err();
    assert!(matches!(err, AppError::UnitNotAvailable(_)));

    // No draft was ever created
    assert!(matches!(
        services.bookings.current().await,
        Err(AppError::NoActiveBooking)
    ));
}

#[tokio::test]
async fn test_only_one_session_at_a_time() {
    let services = services();

    services.bookings.open(1).await.unwrap();
    let err = services.bookings.open(2).await.unwrap_err();
    assert!(matches!(err, AppError::BookingInProgress));

    // Closing the first frees the slot
    services.bookings.close().await.unwrap();
    assert!(services.bookings.open(2).await.is_ok());
}

#[tokio::test]
async fn test_quote_recomputed_on_tier_change() {
    let services = services();

    services.bookings.open(2).await.unwrap();
    assert_eq!(
        services.bookings.quote().await.unwrap().total_price,
        Decimal::from(250000)
    );

    services
        .bookings
        .update_field(DraftField::Duration, "24h")
        .await
        .unwrap();
    assert_eq!(
        services.bookings.quote().await.unwrap().total_price,
        Decimal::from(1000000)
    );

    services
        .bookings
        .update_field(DraftField::Duration, "4h")
        .await
        .unwrap();
    assert_eq!(
        services.bookings.quote().await.unwrap().total_price,
        Decimal::from(250000)
    );
}

#[tokio::test]
async fn test_no_edits_after_confirmation() {
    let services = services();

    services.bookings.open(1).await.unwrap();
    fill_required(&services).await;
    services.bookings.submit().await.unwrap();

    let err = services
        .bookings
        .update_field(DraftField::GuestCount, "2")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BookingAlreadyConfirmed));

    let err = services.bookings.submit().await.unwrap_err();
    assert!(matches!(err, AppError::BookingAlreadyConfirmed));
}

#[tokio::test(start_paused = true)]
async fn test_confirmed_session_auto_closes_after_delay() {
    let services = services_with_close_delay(2);

    services.bookings.open(1).await.unwrap();
    fill_required(&services).await;
    services.bookings.submit().await.unwrap();

    // Still visible in the success state right after submit
    assert!(services.bookings.current().await.is_ok());

    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    assert!(matches!(
        services.bookings.current().await,
        Err(AppError::NoActiveBooking)
    ));
}

#[tokio::test(start_paused = true)]
async fn test_explicit_close_cancels_auto_close() {
    let services = services_with_close_delay(2);

    services.bookings.open(1).await.unwrap();
    fill_required(&services).await;
    services.bookings.submit().await.unwrap();
    services.bookings.close().await.unwrap();

    // A new session opened before the old delay elapses must survive it
    services.bookings.open(2).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    assert!(services.bookings.current().await.is_ok());
}
