fn main() {
    rpnlisp::cli::run();
}
