use honggfuzz::fuzz;

use base45_qr::{stream, Scheme};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            for scheme in [Scheme::Standard, Scheme::Qr] {
                let mut decoded = Vec::new();
                let streamed = stream::decode_stream(scheme, data, &mut decoded);
                let in_memory = std::str::from_utf8(data)
                    .ok()
                    .filter(|s| s.is_ascii())
                    .map(|s| base45_qr::decode(s, scheme));
                if let Some(in_memory) = in_memory {
                    assert_eq!(streamed.is_ok(), in_memory.is_ok());
                    if let Ok(bytes) = in_memory {
                        assert_eq!(bytes, decoded);
                    }
                }
            }
        });
    }
}
