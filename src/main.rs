fn main() {
    #[cfg(feature = "contiguous")]
    container_tour::tour::contiguous::demo();

    #[cfg(feature = "ordered")]
    container_tour::tour::ordered::demo();

    #[cfg(feature = "priority")]
    container_tour::tour::priority::demo();

    #[cfg(feature = "hashed")]
    container_tour::tour::hashed::demo();

    #[cfg(feature = "tuples")]
    container_tour::tour::tuples::demo();
}
