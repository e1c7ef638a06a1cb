fn main() -> anyhow::Result<()> {
    whitted::run()
}
