fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    euc::repl::start()
}
