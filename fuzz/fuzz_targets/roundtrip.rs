use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            for scheme in [base45_qr::Scheme::Standard, base45_qr::Scheme::Qr] {
                let encoded = base45_qr::encode(data, scheme).unwrap();
                assert_eq!(encoded.len(), scheme.encoded_len(data.len()));
                let decoded = base45_qr::decode(&encoded, scheme).unwrap();
                assert_eq!(data, decoded);
            }
        });
    }
}
