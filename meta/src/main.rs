fn main() {
    multiversx_sc_meta_lib::cli_main::<community_ledger::AbiProvider>();
}
