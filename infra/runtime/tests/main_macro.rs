#[academy_runtime::main(memory_efficient)]
async fn lean_entry() -> anyhow::Result<usize> {
    let handle = tokio::spawn(async { "lessons".len() });
    Ok(handle.await?)
}

#[academy_runtime::main]
async fn default_entry() -> anyhow::Result<()> {
    tokio::task::yield_now().await;
    Ok(())
}

#[test]
fn main_macro_drives_an_async_body() {
    assert_eq!(lean_entry().expect("runtime should run the body"), 7);
}

#[test]
fn main_macro_without_profile_uses_default() {
    default_entry().expect("default profile should build");
}
