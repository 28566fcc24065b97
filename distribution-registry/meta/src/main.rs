fn main() {
    multiversx_sc_meta_lib::cli_main::<distribution_registry::AbiProvider>();
}
