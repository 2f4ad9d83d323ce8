use qrcode::{EcLevel, QrCode};

use std::io::Write;

fn main() {
    let payload = std::env::args().next_back().unwrap();
    let encoded = base45_qr::qr::encode(payload.as_bytes()).unwrap();
    let code = QrCode::with_error_correction_level(&encoded, EcLevel::L).unwrap();
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();
    let mut stdout = std::io::stdout();
    stdout.write_all(format!("{string}\n").as_bytes()).unwrap();
    stdout
        .write_all(format!("{encoded}\n{} bytes as {} characters\n", payload.len(), encoded.len()).as_bytes())
        .unwrap();
    stdout.flush().unwrap();
}
