fn main() {
    multiversx_sc_meta_lib::cli_main::<sponsor_pool::AbiProvider>();
}
