#[derive(Default, fieldcol::Model)]
struct Marker;

fn main() {
    use fieldcol::Model as _;

    assert!(Marker.fields().is_empty());
}
