mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{api, date, room, FakeAPI};

use tripdesk::error::{rejection_error, Error};
use tripdesk::external::payment::{DynGateway, PaymentGateway, Receipt, SimulatedGateway};
use tripdesk::notify::{Notifier, Phase};
use tripdesk::views::booking::BookingForm;

struct DecliningGateway;

#[async_trait]
impl PaymentGateway for DecliningGateway {
    async fn charge(&self, _reference: &str, _amount: i64) -> Result<Receipt, Error> {
        Err(rejection_error(Some("card declined".into())))
    }
}

#[tokio::test]
async fn quote_prices_the_stay_and_adds_rounded_tax() {
    let fake = FakeAPI::new();
    let (notices, _feed) = Notifier::new();
    let gateway: DynGateway = Arc::new(SimulatedGateway);

    let mut form = BookingForm::new(
        api(&fake),
        gateway,
        notices,
        room(1, 1, vec![199, 249, 199, 299]),
        1,
    );

    form.set_dates(date(2023, 8, 15), date(2023, 8, 18));
    let quote = form.quote(date(2023, 8, 15)).unwrap();

    assert_eq!(quote.nights, 3);
    assert_eq!(quote.subtotal, 647);
    assert_eq!(quote.total, 725);
}

#[tokio::test]
async fn submit_charges_then_books_and_confirms_in_place() {
    let fake = FakeAPI::new();
    let (notices, feed) = Notifier::new();
    let gateway: DynGateway = Arc::new(SimulatedGateway);

    let mut form = BookingForm::new(
        api(&fake),
        gateway,
        notices,
        room(1, 1, vec![199, 249, 199, 299]),
        1,
    );

    form.set_dates(date(2023, 8, 15), date(2023, 8, 18));
    form.submit(date(2023, 8, 15)).await;

    let confirmation = form.confirmation().expect("booking confirmed");
    assert_eq!(confirmation.total, 725);
    assert!(confirmation.id.as_deref().unwrap().starts_with("bk-"));

    let bookings = fake.bookings.lock().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].total, 725);

    let pending = feed.try_recv().unwrap();
    let resolved = feed.try_recv().unwrap();
    assert_eq!(pending.phase, Phase::Pending);
    assert_eq!(resolved.phase, Phase::Success);
    assert_eq!(pending.id, resolved.id);
}

#[tokio::test]
async fn declined_charge_never_reaches_the_booking_endpoint() {
    let fake = FakeAPI::new();
    let (notices, feed) = Notifier::new();
    let gateway: DynGateway = Arc::new(DecliningGateway);

    let mut form = BookingForm::new(
        api(&fake),
        gateway,
        notices,
        room(1, 1, vec![199, 249, 199, 299]),
        1,
    );

    form.set_dates(date(2023, 8, 15), date(2023, 8, 18));
    form.submit(date(2023, 8, 15)).await;

    assert!(form.confirmation().is_none());
    assert!(!form.is_submitting());
    assert!(fake.bookings.lock().unwrap().is_empty());

    let pending = feed.try_recv().unwrap();
    let resolved = feed.try_recv().unwrap();
    assert_eq!(pending.phase, Phase::Pending);
    assert_eq!(resolved.phase, Phase::Failure);
    assert_eq!(pending.id, resolved.id);
    assert!(resolved.text.contains("card declined"));
}

#[tokio::test]
async fn failed_booking_call_leaves_no_confirmation() {
    let fake = FakeAPI::new();
    let (notices, feed) = Notifier::new();
    let gateway: DynGateway = Arc::new(SimulatedGateway);

    let mut form = BookingForm::new(
        api(&fake),
        gateway,
        notices,
        room(1, 1, vec![199, 249, 199, 299]),
        1,
    );

    form.set_dates(date(2023, 8, 15), date(2023, 8, 18));
    fake.fail_next_call();
    form.submit(date(2023, 8, 15)).await;

    assert!(form.confirmation().is_none());
    assert!(fake.bookings.lock().unwrap().is_empty());

    let _pending = feed.try_recv().unwrap();
    assert_eq!(feed.try_recv().unwrap().phase, Phase::Failure);
}

#[tokio::test]
async fn missing_dates_fail_the_quote_without_a_network_call() {
    let fake = FakeAPI::new();
    let (notices, _feed) = Notifier::new();
    let gateway: DynGateway = Arc::new(SimulatedGateway);

    let mut form = BookingForm::new(api(&fake), gateway, notices, room(1, 1, vec![199]), 1);

    assert!(form.quote(date(2023, 8, 15)).is_err());

    form.submit(date(2023, 8, 15)).await;
    assert!(fake.bookings.lock().unwrap().is_empty());
}
