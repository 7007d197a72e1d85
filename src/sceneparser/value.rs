use std::fmt::{self, Display, Formatter};
use crate::core::dotscene::{Float, Vector3f, Vector4f, Matrix4f};
use crate::sceneparser::error::Result;
use crate::sceneparser::stream::Stream;

/// The literal syntax a leaf expects. It is fixed by the key being read,
/// never guessed from the text.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ValueKind {
    Float,
    Vec3,
    Vec4,
    Mat4,
    QuotedString
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::QuotedString => write!(f, "string"),
            _ => {
                let s = format!("{:?}", self).to_lowercase();
                write!(f, "{}", s)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(Float),
    Vec3(Vector3f),
    Vec4(Vector4f),
    Mat4(Matrix4f),
    QuotedString(String)
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_)        => ValueKind::Float,
            Value::Vec3(_)         => ValueKind::Vec3,
            Value::Vec4(_)         => ValueKind::Vec4,
            Value::Mat4(_)         => ValueKind::Mat4,
            Value::QuotedString(_) => ValueKind::QuotedString
        }
    }

    pub fn decode(s: &mut Stream, kind: ValueKind) -> Result<Value> {
        let v = match kind {
            ValueKind::Float        => Value::Float(s.number(kind)?),
            ValueKind::Vec3         => {
                let [x, y, z] = tuple::<3>(s, kind)?;
                Value::Vec3(Vector3f::new(x, y, z))
            }
            ValueKind::Vec4         => {
                let [x, y, z, w] = tuple::<4>(s, kind)?;
                Value::Vec4(Vector4f::new(x, y, z, w))
            }
            ValueKind::Mat4         => Value::Mat4(matrix(s)?),
            ValueKind::QuotedString => Value::QuotedString(s.quoted()?.to_owned())
        };

        Ok(v)
    }

    pub fn as_float(&self) -> Option<Float> {
        match *self {
            Value::Float(f) => Some(f),
            _               => None
        }
    }

    pub fn as_vec3(&self) -> Option<Vector3f> {
        match *self {
            Value::Vec3(v) => Some(v),
            _              => None
        }
    }

    pub fn as_vec4(&self) -> Option<Vector4f> {
        match *self {
            Value::Vec4(v) => Some(v),
            _              => None
        }
    }

    pub fn as_mat4(&self) -> Option<Matrix4f> {
        match *self {
            Value::Mat4(m) => Some(m),
            _              => None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::QuotedString(s) => Some(s),
            _                      => None
        }
    }
}

/// `( f , f , ... )` with exactly `N` components.
fn tuple<const N: usize>(s: &mut Stream, kind: ValueKind) -> Result<[Float; N]> {
    let mut vals = [0.0; N];

    s.expect('(')?;
    for (i, v) in vals.iter_mut().enumerate() {
        if i > 0 { s.expect(',')?; }
        *v = s.number(kind)?;
    }
    s.expect(')')?;

    Ok(vals)
}

fn matrix(s: &mut Stream) -> Result<Matrix4f> {
    let mut rows = [[0.0; 4]; 4];

    s.expect('(')?;
    for (i, row) in rows.iter_mut().enumerate() {
        if i > 0 { s.expect(',')?; }
        *row = tuple::<4>(s, ValueKind::Mat4)?;
    }
    s.expect(')')?;

    Ok(Matrix4f::from_fn(|r, c| rows[r][c]))
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(v)        => write!(f, "{}", v),
            Value::Vec3(v)         => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            Value::Vec4(v)         => write!(f, "({}, {}, {}, {})", v.x, v.y, v.z, v.w),
            Value::Mat4(m)         => {
                write!(f, "(")?;
                for r in 0..4 {
                    if r > 0 { write!(f, ", ")?; }
                    write!(f, "({}, {}, {}, {})", m[(r, 0)], m[(r, 1)], m[(r, 2)], m[(r, 3)])?;
                }
                write!(f, ")")
            }
            Value::QuotedString(s) => write!(f, "\"{}\"", s)
        }
    }
}
