pub trait Rewriter {
    fn rewrite(&mut self, input: Vec<u8>) -> crate::Result<Vec<u8>>;
}
