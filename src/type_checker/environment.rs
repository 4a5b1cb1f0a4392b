use super::typeres::TypeRes;

/// A single scope. Bindings are only ever appended; a later binding of the
/// same name shadows the earlier one.
#[derive(Debug, Default)]
pub struct Environment {
    symbols: Vec<(String, TypeRes)>,
}

impl Environment {
    pub fn new() -> Self {
        Environment { symbols: vec![] }
    }

    pub fn declare(&mut self, name: String, type_res: TypeRes) {
        self.symbols.push((name, type_res));
    }

    pub fn get(&self, name: &str) -> Option<&TypeRes> {
        self.symbols
            .iter()
            .rev()
            .find(|(symbol, _)| symbol == name)
            .map(|(_, type_res)| type_res)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Scopes from the outermost (global) to the innermost.
#[derive(Debug, Default)]
pub struct Environments {
    scopes: Vec<Environment>,
}

impl Environments {
    pub fn new() -> Self {
        Environments { scopes: vec![] }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Environment::new());
    }

    /// Drops the innermost scope together with its bindings.
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Binds `name` in the innermost scope. Without any scope the binding
    /// goes to a fresh global one.
    pub fn declare(&mut self, name: String, type_res: TypeRes) {
        if self.scopes.is_empty() {
            self.push_scope();
        }

        if let Some(scope) = self.scopes.last_mut() {
            scope.declare(name, type_res);
        }
    }

    /// Looks `name` up from the innermost scope outwards.
    pub fn lookup(&self, name: &str) -> Option<&TypeRes> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn current(&self) -> Option<&Environment> {
        self.scopes.last()
    }
}
