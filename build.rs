//! Retrieves information about the version of the engine from Git and the build
//! environment. The generated `shadow.rs` is included by the library and shown
//! in the session banner.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
