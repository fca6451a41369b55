fn main() -> anyhow::Result<()> {
    workflow_validation::cli::main()
}
