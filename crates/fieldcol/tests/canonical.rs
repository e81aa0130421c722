use fieldcol::{column_name, db, ColumnRef, Connection};

use std::sync::{mpsc, Arc, Barrier};
use std::thread;
use std::time::Duration;

fn setup() {
    db::register(Connection::new(fieldcol::DEFAULT_CONNECTION));
}

#[derive(Debug, Default, fieldcol::Model)]
struct Customer {
    id: i64,
    email_address: String,
}

#[derive(Debug, Default, fieldcol::Model)]
struct Shipment {
    tracking_code: String,
}

#[test]
fn repeated_calls_share_instance() {
    setup();

    let first = fieldcol::model::<Customer>();
    let token = ColumnRef::field(&first.email_address);

    let second = fieldcol::model::<Customer>();
    assert!(std::ptr::eq(first, second));
    assert_eq!(column_name(token), "email_address");
    assert_eq!(column_name(ColumnRef::field(&second.id)), "id");
}

#[test]
fn concurrent_first_calls_agree() {
    setup();

    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                fieldcol::model::<Shipment>() as *const Shipment as usize
            })
        })
        .collect();

    let addrs: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(addrs.windows(2).all(|pair| pair[0] == pair[1]));

    let shipment = fieldcol::model::<Shipment>();
    assert_eq!(shipment as *const Shipment as usize, addrs[0]);
    assert_eq!(column_name(ColumnRef::field(&shipment.tracking_code)), "tracking_code");
}

#[derive(Debug, Default, fieldcol::Model)]
struct Status {
    code: i64,
}

#[derive(Debug, fieldcol::Model)]
struct Purchase {
    status_code: i64,
}

impl Default for Purchase {
    fn default() -> Self {
        Purchase {
            status_code: fieldcol::model::<Status>().code,
        }
    }
}

#[test]
fn creation_may_use_other_models() {
    setup();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let purchase = fieldcol::model::<Purchase>();
        let _ = tx.send(column_name(ColumnRef::field(&purchase.status_code)));
    });

    let column = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("creating a model that uses another model did not finish");
    assert_eq!(column, "status_code");

    let status = fieldcol::model::<Status>();
    assert_eq!(column_name(ColumnRef::field(&status.code)), "code");
}
