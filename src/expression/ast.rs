/// Expression tree over die faces, as built by the generator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Number(u32),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Square(Box<Expression>),
    Sqrt(Box<Expression>), // integral square roots only
}

impl Expression {
    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => 1 + l.size() + r.size(),
            Expression::Square(e) | Expression::Sqrt(e) => 1 + e.size(),
        }
    }

    /// Die faces in the order they appear, left to right
    #[cfg(test)]
    pub(crate) fn operands(&self) -> Vec<u32> {
        fn collect(expr: &Expression, out: &mut Vec<u32>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
                Expression::Square(e) | Expression::Sqrt(e) => collect(e, out),
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
