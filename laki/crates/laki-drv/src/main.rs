fn main() {
    if let Err(e) = laki_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
