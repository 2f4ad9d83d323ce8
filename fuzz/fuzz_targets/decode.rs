use honggfuzz::fuzz;

use base45_qr::{decode, Scheme};

fn main() {
    loop {
        fuzz!(|data: &str| {
            decode(data, Scheme::Standard).ok();
            decode(data, Scheme::Qr).ok();
        });
    }
}
