fn main() -> anyhow::Result<()> {
    mdcards_cli::run()
}
