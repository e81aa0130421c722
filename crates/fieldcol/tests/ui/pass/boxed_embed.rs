use std::marker::PhantomData;

#[derive(Default, fieldcol::Model)]
struct Address {
    street: String,
    city: String,
}

#[derive(Default, fieldcol::Model)]
struct Customer {
    id: i64,
    #[embed]
    address: Box<Address>,
    marker: PhantomData<u8>,
}

fn main() {
    use fieldcol::Model as _;

    let customer = Customer::default();
    assert_eq!(customer.fields().len(), 3);
}
