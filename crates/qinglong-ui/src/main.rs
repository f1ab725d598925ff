#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Browser entry point for the header navigation; native builds only print build hints.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    qinglong_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"qinglong-ui renders the header navigation in the browser only.\n\
          Serve it with `trunk serve crates/qinglong-ui/index.html`, or build the wasm module with\n\
          `cargo build -p qinglong-ui --target wasm32-unknown-unknown`.\n",
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_entry_prints_build_hint() -> std::io::Result<()> {
        main()
    }
}
