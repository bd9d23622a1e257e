error_chain! {
    foreign_links {
        Io(std::io::Error)
        /// An error while reading or writing a graph.
        ;
    }

    errors {
        /// A vertex index outside of `[0, vertex_count)`.
        InvalidVertex(vertex: usize, vertex_count: usize) {
            description("invalid vertex")
            display("vertex {} is not in [0, {})", vertex, vertex_count)
        }

        /// A negative vertex in a textual graph.
        NegativeVertex(vertex: i64) {
            description("invalid vertex")
            display("vertex {} is negative", vertex)
        }

        /// A negative or unrepresentable vertex or edge count in a textual graph.
        InvalidSize(what: &'static str, value: i64) {
            description("invalid size")
            display("invalid number of {}: {}", what, value)
        }

        /// A truncated or otherwise malformed textual graph.
        BadFormat(message: String) {
            description("invalid input format")
            display("invalid input format: {}", message)
        }

        /// An edge weight that is not a finite number.
        InvalidWeight(from: usize, to: usize, weight: f64) {
            description("invalid edge weight")
            display("edge {}-{} has non-finite weight {}", from, to, weight)
        }

        /// An edge with negative weight was given to an algorithm that requires non-negative weights.
        NegativeWeight(from: usize, to: usize, weight: f64) {
            description("negative edge weight")
            display("edge {}-{} has negative weight {}", from, to, weight)
        }

        /// An index-addressed collaborator structure was used inconsistently.
        InvalidIndex(message: String) {
            description("invalid index operation")
            display("invalid index operation: {}", message)
        }

        /// Distances and paths are undefined once a negative cycle was detected.
        NegativeCycle {
            description("negative cost cycle exists")
            display("negative cost cycle exists")
        }
    }
}

impl ErrorKind {
    /// Returns true if this error is caused by an invalid argument, i.e. an invalid vertex, size, format, weight or index.
    pub fn is_invalid_argument(&self) -> bool {
        self.is_invalid_vertex()
            || matches!(
                self,
                ErrorKind::InvalidSize(..)
                    | ErrorKind::BadFormat(..)
                    | ErrorKind::InvalidWeight(..)
                    | ErrorKind::NegativeWeight(..)
                    | ErrorKind::InvalidIndex(..)
            )
    }

    /// Returns true if this error is caused by a vertex outside of `[0, vertex_count)`.
    pub fn is_invalid_vertex(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidVertex(..) | ErrorKind::NegativeVertex(..)
        )
    }

    /// Returns true if this error is caused by an operation that is unsupported in the current state of an algorithm.
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, ErrorKind::NegativeCycle)
    }
}
