//! Statement parsing.

use super::Parser;
use crate::ast::{Expression, GateCall, Operand, RegKind, Statement};
use crate::error::{ParseError, ParseResult};
use crate::lexer::Token;

impl Parser<'_> {
    /// Parse a statement.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let position = self.position();
        let token = self
            .peek()
            .cloned()
            .ok_or_else(|| ParseError::UnexpectedEof("statement".into()))?;

        match token {
            Token::Include => self.parse_include(),
            Token::Qreg => self.parse_old_style_decl(RegKind::Qubit),
            Token::Creg => self.parse_old_style_decl(RegKind::Bit),
            Token::Qubit => self.parse_qubit_decl(),
            Token::Const => self.parse_const_decl(),
            Token::Barrier => self.parse_barrier(),
            Token::Reset => self.parse_reset(),
            Token::Identifier(_) => self.parse_gate_call(),
            _ => Err(ParseError::UnexpectedToken {
                position,
                expected: "statement".into(),
                found: token.to_string(),
            }),
        }
    }

    /// Parse include statement.
    fn parse_include(&mut self) -> ParseResult<Statement> {
        self.expect(Token::Include)?;
        let position = self.position();
        let path = match self.advance() {
            Some(Token::StringLiteral(s)) => s,
            Some(other) => {
                return Err(ParseError::UnexpectedToken {
                    position,
                    expected: "string literal".into(),
                    found: other.to_string(),
                });
            }
            None => return Err(ParseError::UnexpectedEof("include path".into())),
        };
        self.expect(Token::Semicolon)?;
        Ok(Statement::Include(path))
    }

    /// Parse old-style register declaration: `qreg q[n];` / `creg c;`.
    fn parse_old_style_decl(&mut self, kind: RegKind) -> ParseResult<Statement> {
        self.advance(); // qreg or creg keyword
        let name = self.parse_identifier()?;
        let designator = self.parse_designator()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::RegDecl {
            kind,
            name,
            designator,
        })
    }

    /// Parse new-style qubit declaration: `qubit[n] q;` / `qubit q;`.
    fn parse_qubit_decl(&mut self) -> ParseResult<Statement> {
        self.expect(Token::Qubit)?;
        let designator = self.parse_designator()?;
        let name = self.parse_identifier()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::QubitDecl { name, designator })
    }

    /// Parse constant declaration: `const int n = 4;`.
    ///
    /// The scalar type keyword is required by the grammar but otherwise
    /// ignored: the evaluated initializer decides the value's kind.
    fn parse_const_decl(&mut self) -> ParseResult<Statement> {
        self.expect(Token::Const)?;
        let position = self.position();
        match self.advance() {
            Some(Token::Int | Token::Float) => {}
            Some(other) => {
                return Err(ParseError::UnexpectedToken {
                    position,
                    expected: "scalar type".into(),
                    found: other.to_string(),
                });
            }
            None => return Err(ParseError::UnexpectedEof("scalar type".into())),
        }
        let name = self.parse_identifier()?;
        self.expect(Token::Eq)?;
        let value = self.parse_expression()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::ConstDecl { name, value })
    }

    /// Parse barrier statement (carried in the CST, skipped by lowering).
    fn parse_barrier(&mut self) -> ParseResult<Statement> {
        self.expect(Token::Barrier)?;
        let operands = if self.check(&Token::Semicolon) {
            vec![]
        } else {
            self.parse_operand_list()?
        };
        self.expect(Token::Semicolon)?;
        Ok(Statement::Barrier { operands })
    }

    /// Parse reset statement (carried in the CST, skipped by lowering).
    fn parse_reset(&mut self) -> ParseResult<Statement> {
        self.expect(Token::Reset)?;
        let operands = self.parse_operand_list()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::Reset { operands })
    }

    /// Parse gate call: `name(angle, ...) op, op, ...;`.
    fn parse_gate_call(&mut self) -> ParseResult<Statement> {
        let name = self.parse_identifier()?;

        let angles = if self.consume(&Token::LParen) {
            let exprs = self.parse_expression_list()?;
            self.expect(Token::RParen)?;
            exprs
        } else {
            vec![]
        };

        let operands = self.parse_operand_list()?;
        self.expect(Token::Semicolon)?;

        Ok(Statement::Gate(GateCall {
            name,
            angles,
            operands,
        }))
    }

    /// Parse the optional bracketed size designator.
    fn parse_designator(&mut self) -> ParseResult<Option<Expression>> {
        if self.consume(&Token::LBracket) {
            let expr = self.parse_expression()?;
            self.expect(Token::RBracket)?;
            Ok(Some(expr))
        } else {
            Ok(None)
        }
    }

    /// Parse a comma-separated operand list.
    fn parse_operand_list(&mut self) -> ParseResult<Vec<Operand>> {
        let mut operands = vec![self.parse_operand()?];
        while self.consume(&Token::Comma) {
            operands.push(self.parse_operand()?);
        }
        Ok(operands)
    }

    /// Parse a single operand: an identifier with zero or more chained
    /// index operators.
    fn parse_operand(&mut self) -> ParseResult<Operand> {
        let name = self.parse_identifier()?;
        let indices = self.parse_index_operators()?;
        Ok(Operand { name, indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_ast;

    #[test]
    fn test_old_style_decl_cst() {
        let program = parse_ast("qreg q[3]; creg c[2];").unwrap();
        assert!(matches!(
            &program.statements[0],
            Statement::RegDecl {
                kind: RegKind::Qubit,
                name,
                designator: Some(Expression::Int(3)),
            } if name == "q"
        ));
        assert!(matches!(
            &program.statements[1],
            Statement::RegDecl {
                kind: RegKind::Bit,
                name,
                designator: Some(Expression::Int(2)),
            } if name == "c"
        ));
    }

    #[test]
    fn test_scalar_decl_cst() {
        let program = parse_ast("qubit q;").unwrap();
        assert!(matches!(
            &program.statements[0],
            Statement::QubitDecl {
                name,
                designator: None,
            } if name == "q"
        ));
    }

    #[test]
    fn test_const_decl_cst() {
        let program = parse_ast("const int n = 2 + 2;").unwrap();
        let Statement::ConstDecl { name, value } = &program.statements[0] else {
            panic!("expected const declaration");
        };
        assert_eq!(name, "n");
        assert!(matches!(value, Expression::BinOp { .. }));
    }

    #[test]
    fn test_const_decl_requires_type() {
        let result = parse_ast("const n = 4;");
        assert!(matches!(result, Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn test_gate_call_cst() {
        let program = parse_ast("crz(pi/3) q[0], q[1];").unwrap();
        let Statement::Gate(call) = &program.statements[0] else {
            panic!("expected gate call");
        };
        assert_eq!(call.name, "crz");
        assert_eq!(call.angles.len(), 1);
        assert_eq!(call.operands.len(), 2);
        assert_eq!(call.operands[0].name, "q");
        assert_eq!(call.operands[0].indices.len(), 1);
    }

    #[test]
    fn test_bare_operand_cst() {
        let program = parse_ast("h q;").unwrap();
        let Statement::Gate(call) = &program.statements[0] else {
            panic!("expected gate call");
        };
        assert!(call.operands[0].indices.is_empty());
    }

    #[test]
    fn test_chained_index_cst() {
        let program = parse_ast("x m[1][2];").unwrap();
        let Statement::Gate(call) = &program.statements[0] else {
            panic!("expected gate call");
        };
        assert_eq!(call.operands[0].indices.len(), 2);
    }

    #[test]
    fn test_expression_precedence_cst() {
        // 1 + 2 * 3 must parse as 1 + (2 * 3)
        let program = parse_ast("const int n = 1 + 2 * 3;").unwrap();
        let Statement::ConstDecl { value, .. } = &program.statements[0] else {
            panic!("expected const declaration");
        };
        let Expression::BinOp { op, right, .. } = value else {
            panic!("expected binary expression");
        };
        assert_eq!(*op, crate::ast::BinOp::Add);
        assert!(matches!(
            **right,
            Expression::BinOp {
                op: crate::ast::BinOp::Mul,
                ..
            }
        ));
    }

    #[test]
    fn test_unparseable_expression() {
        let result = parse_ast("rx(,) q[0];");
        assert!(matches!(
            result,
            Err(ParseError::UnparseableExpression(_))
        ));
    }
}
