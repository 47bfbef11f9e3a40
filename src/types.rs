use std::{collections::BTreeMap, fmt};

/// Opaque body identifier assigned by the sensor. Zero never names a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackingId(pub u64);

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackedBody {
    pub id: TrackingId,
    pub is_tracked: bool,
    pub joints: Vec<Joint>,
}

impl TrackedBody {
    pub fn new(id: u64, is_tracked: bool) -> Self {
        Self {
            id: TrackingId(id),
            is_tracked,
            joints: Vec::new(),
        }
    }

    pub fn with_joints(mut self, joints: Vec<Joint>) -> Self {
        self.joints = joints;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSpacePoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingState {
    Tracked,
    Inferred,
    NotTracked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Joint {
    pub kind: JointKind,
    pub position: CameraSpacePoint,
    pub state: TrackingState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JointKind {
    SpineBase,
    SpineMid,
    Neck,
    Head,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    FootLeft,
    HipRight,
    KneeRight,
    AnkleRight,
    FootRight,
    SpineShoulder,
    HandTipLeft,
    ThumbLeft,
    HandTipRight,
    ThumbRight,
}

impl JointKind {
    pub const ALL: [JointKind; 25] = [
        JointKind::SpineBase,
        JointKind::SpineMid,
        JointKind::Neck,
        JointKind::Head,
        JointKind::ShoulderLeft,
        JointKind::ElbowLeft,
        JointKind::WristLeft,
        JointKind::HandLeft,
        JointKind::ShoulderRight,
        JointKind::ElbowRight,
        JointKind::WristRight,
        JointKind::HandRight,
        JointKind::HipLeft,
        JointKind::KneeLeft,
        JointKind::AnkleLeft,
        JointKind::FootLeft,
        JointKind::HipRight,
        JointKind::KneeRight,
        JointKind::AnkleRight,
        JointKind::FootRight,
        JointKind::SpineShoulder,
        JointKind::HandTipLeft,
        JointKind::ThumbLeft,
        JointKind::HandTipRight,
        JointKind::ThumbRight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JointKind::SpineBase => "SpineBase",
            JointKind::SpineMid => "SpineMid",
            JointKind::Neck => "Neck",
            JointKind::Head => "Head",
            JointKind::ShoulderLeft => "ShoulderLeft",
            JointKind::ElbowLeft => "ElbowLeft",
            JointKind::WristLeft => "WristLeft",
            JointKind::HandLeft => "HandLeft",
            JointKind::ShoulderRight => "ShoulderRight",
            JointKind::ElbowRight => "ElbowRight",
            JointKind::WristRight => "WristRight",
            JointKind::HandRight => "HandRight",
            JointKind::HipLeft => "HipLeft",
            JointKind::KneeLeft => "KneeLeft",
            JointKind::AnkleLeft => "AnkleLeft",
            JointKind::FootLeft => "FootLeft",
            JointKind::HipRight => "HipRight",
            JointKind::KneeRight => "KneeRight",
            JointKind::AnkleRight => "AnkleRight",
            JointKind::FootRight => "FootRight",
            JointKind::SpineShoulder => "SpineShoulder",
            JointKind::HandTipLeft => "HandTipLeft",
            JointKind::ThumbLeft => "ThumbLeft",
            JointKind::HandTipRight => "HandTipRight",
            JointKind::ThumbRight => "ThumbRight",
        }
    }
}

/// Face bounding box in color-space pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacePointKind {
    EyeLeft,
    EyeRight,
    Nose,
    MouthCornerLeft,
    MouthCornerRight,
}

impl FacePointKind {
    pub const ALL: [FacePointKind; 5] = [
        FacePointKind::EyeLeft,
        FacePointKind::EyeRight,
        FacePointKind::Nose,
        FacePointKind::MouthCornerLeft,
        FacePointKind::MouthCornerRight,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceProperty {
    Happy,
    Engaged,
    WearingGlasses,
    LeftEyeClosed,
    RightEyeClosed,
    MouthOpen,
    MouthMoved,
    LookingAway,
}

impl FaceProperty {
    pub const ALL: [FaceProperty; 8] = [
        FaceProperty::Happy,
        FaceProperty::Engaged,
        FaceProperty::WearingGlasses,
        FaceProperty::LeftEyeClosed,
        FaceProperty::RightEyeClosed,
        FaceProperty::MouthOpen,
        FaceProperty::MouthMoved,
        FaceProperty::LookingAway,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FaceProperty::Happy => "Happy",
            FaceProperty::Engaged => "Engaged",
            FaceProperty::WearingGlasses => "WearingGlasses",
            FaceProperty::LeftEyeClosed => "LeftEyeClosed",
            FaceProperty::RightEyeClosed => "RightEyeClosed",
            FaceProperty::MouthOpen => "MouthOpen",
            FaceProperty::MouthMoved => "MouthMoved",
            FaceProperty::LookingAway => "LookingAway",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetectionResult {
    Yes,
    No,
    Maybe,
    Unknown,
}

impl DetectionResult {
    pub fn label(&self) -> &'static str {
        match self {
            DetectionResult::Yes => "Yes",
            DetectionResult::No => "No",
            DetectionResult::Maybe => "Maybe",
            DetectionResult::Unknown => "Unknown",
        }
    }
}

/// Rotation as (x, y, z, w). Expected to be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceGeometryResult {
    pub bounding_box: FaceRect,
    /// `None` when the face stream was not asked for points.
    pub landmarks: Option<BTreeMap<FacePointKind, PointF>>,
    pub attributes: BTreeMap<FaceProperty, DetectionResult>,
    pub rotation: Quaternion,
}

/// Color-space bounds that face geometry must fall inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceFrame {
    pub width: u32,
    pub height: u32,
}

impl ReferenceFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Quantized head orientation in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceOrientation {
    pub pitch: i32,
    pub yaw: i32,
    pub roll: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorImageFormat {
    Bgra,
    Rgba,
    Yuy2,
}

#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: ColorImageFormat,
}
