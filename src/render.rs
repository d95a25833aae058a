use crate::raster;
use greeting_core::{rgb_components, FrameView, RenderBackend, SceneError, SpriteId, SpriteSource, Starfield};
use fnv::FnvHashMap;
use glam::Mat4;
use web_sys as web;

mod helpers;
use helpers::SpriteTexture;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    star_model: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    star: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteInstance {
    center: [f32; 4],
    size_opacity: [f32; 4],
}

const MIN_INSTANCE_CAPACITY: usize = 256;

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    sprite_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    star_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    stars: Option<(wgpu::Buffer, u32)>,
    instances: wgpu::Buffer,
    instance_capacity: usize,
}

/// WebGPU scene renderer. Sprite textures are rasterized with Canvas 2D and
/// kept in a table keyed by the ids handed to the core.
pub struct GpuRenderer {
    document: web::Document,
    gpu: Option<GpuState>,
    sprites: FnvHashMap<SpriteId, SpriteTexture>,
    next_sprite: u32,
    draw_order: Vec<(f32, usize)>,
}

impl GpuRenderer {
    pub async fn new(document: web::Document, canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let sprite_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let star_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("star_layout"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let sprite_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_layout"),
            bind_group_layouts: &[&globals_bgl, &sprite_bgl],
            push_constant_ranges: &[],
        });
        let star_pipeline = helpers::make_billboard_pipeline(
            &device,
            "star_pipeline",
            &star_layout,
            &shader,
            ("vs_star", "fs_star"),
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 4]>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![0 => Float32x4],
            },
            format,
        );
        let sprite_pipeline = helpers::make_billboard_pipeline(
            &device,
            "sprite_pipeline",
            &sprite_layout,
            &shader,
            ("vs_sprite", "fs_sprite"),
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4],
            },
            format,
        );
        let instances = Self::instance_buffer(&device, MIN_INSTANCE_CAPACITY);

        log::info!("[render] WebGPU ready: {:?} {}x{}", format, width, height);
        Ok(Self {
            document,
            gpu: Some(GpuState {
                surface,
                device,
                queue,
                config,
                globals_buffer,
                globals_bg,
                sprite_bgl,
                sampler,
                star_pipeline,
                sprite_pipeline,
                stars: None,
                instances,
                instance_capacity: MIN_INSTANCE_CAPACITY,
            }),
            sprites: FnvHashMap::default(),
            next_sprite: 0,
            draw_order: Vec::new(),
        })
    }

    fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_instances"),
            size: (capacity * std::mem::size_of::<SpriteInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn rasterize(
        &self,
        source: SpriteSource<'_, web::HtmlImageElement>,
    ) -> Result<raster::Raster, SceneError> {
        match source {
            SpriteSource::Message(message) => raster::message(&self.document, message),
            SpriteSource::Photo(image) => raster::photo(&self.document, image),
            SpriteSource::Heart => raster::heart(&self.document),
        }
    }
}

impl RenderBackend for GpuRenderer {
    type Bitmap = web::HtmlImageElement;

    fn create_sprite(
        &mut self,
        source: SpriteSource<'_, web::HtmlImageElement>,
    ) -> Result<SpriteId, SceneError> {
        let raster = self.rasterize(source)?;
        let gpu = self
            .gpu
            .as_ref()
            .ok_or_else(|| SceneError::Backend("renderer released".into()))?;
        let texture = helpers::upload_sprite_texture(
            &gpu.device,
            &gpu.queue,
            &gpu.sprite_bgl,
            &gpu.sampler,
            &raster,
        );
        let id = SpriteId(self.next_sprite);
        self.next_sprite += 1;
        self.sprites.insert(id, texture);
        Ok(id)
    }

    fn release_sprite(&mut self, sprite: SpriteId) {
        if let Some(tex) = self.sprites.remove(&sprite) {
            tex.texture.destroy();
        }
    }

    fn upload_starfield(&mut self, starfield: &Starfield) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let points: Vec<[f32; 4]> = starfield
            .points
            .iter()
            .map(|p| p.extend(1.0).to_array())
            .collect();
        if points.is_empty() {
            gpu.stars = None;
            return;
        }
        let buffer = helpers::vertex_buffer(&gpu.device, "stars", &points);
        gpu.stars = Some((buffer, points.len() as u32));
    }

    fn resize(&mut self, width: u32, height: u32) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if width == 0 || height == 0 {
            return;
        }
        if width != gpu.config.width || height != gpu.config.height {
            gpu.config.width = width;
            gpu.config.height = height;
            gpu.surface.configure(&gpu.device, &gpu.config);
        }
    }

    fn render(&mut self, frame: &FrameView<'_>) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let view = frame.camera.view_matrix();
        let globals = Globals {
            view_proj: (frame.camera.projection_matrix() * view).to_cols_array_2d(),
            star_model: Mat4::from_rotation_y(frame.starfield.rotation_y).to_cols_array_2d(),
            cam_right: view.row(0).truncate().extend(0.0).to_array(),
            cam_up: view.row(1).truncate().extend(0.0).to_array(),
            star: [frame.starfield.size, frame.starfield.opacity, 0.0, 0.0],
        };
        gpu.queue
            .write_buffer(&gpu.globals_buffer, 0, bytemuck::bytes_of(&globals));

        // back to front by view-space depth
        self.draw_order.clear();
        for (i, obj) in frame.objects.iter().enumerate() {
            if obj.visible && self.sprites.contains_key(&obj.sprite) {
                let depth = view.transform_point3(obj.position).z;
                self.draw_order.push((depth, i));
            }
        }
        self.draw_order.sort_by(|a, b| a.0.total_cmp(&b.0));
        let instances: Vec<SpriteInstance> = self
            .draw_order
            .iter()
            .map(|&(_, i)| {
                let obj = &frame.objects[i];
                SpriteInstance {
                    center: obj.position.extend(1.0).to_array(),
                    size_opacity: [obj.size.x, obj.size.y, obj.opacity, 0.0],
                }
            })
            .collect();
        if instances.len() > gpu.instance_capacity {
            gpu.instance_capacity = instances.len().next_power_of_two();
            gpu.instances = Self::instance_buffer(&gpu.device, gpu.instance_capacity);
        }
        if !instances.is_empty() {
            gpu.queue
                .write_buffer(&gpu.instances, 0, bytemuck::cast_slice(&instances));
        }

        let surface_tex = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                log::error!("[render] surface error: {:?}", e);
                return;
            }
        };
        let target = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let [r, g, b] = rgb_components(frame.background);
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &gpu.globals_bg, &[]);
            if let Some((stars, count)) = &gpu.stars {
                rpass.set_pipeline(&gpu.star_pipeline);
                rpass.set_vertex_buffer(0, stars.slice(..));
                rpass.draw(0..6, 0..*count);
            }
            if !instances.is_empty() {
                rpass.set_pipeline(&gpu.sprite_pipeline);
                rpass.set_vertex_buffer(0, gpu.instances.slice(..));
                for (slot, &(_, i)) in self.draw_order.iter().enumerate() {
                    if let Some(tex) = self.sprites.get(&frame.objects[i].sprite) {
                        rpass.set_bind_group(1, &tex.bind_group, &[]);
                        let slot = slot as u32;
                        rpass.draw(0..6, slot..slot + 1);
                    }
                }
            }
        }
        gpu.queue.submit(Some(encoder.finish()));
        surface_tex.present();
    }

    fn release(&mut self) {
        for (_, tex) in self.sprites.drain() {
            tex.texture.destroy();
        }
        if let Some(gpu) = self.gpu.take() {
            gpu.device.destroy();
            log::info!("[render] device released");
        }
    }
}
