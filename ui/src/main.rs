fn main() {
    #[cfg(feature = "csr")]
    seomaster_ui::mount();
}
